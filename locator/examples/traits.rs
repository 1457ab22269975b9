use fibre_locator::{Container, Dependency};

// 1. Define the abstraction (the trait)
trait Logger: Send + Sync {
  fn log(&self, message: &str);
}

// The container stores concrete types, so the trait object travels in a box.
type SharedLogger = Box<dyn Logger>;

// 2. Define a concrete implementation
struct ConsoleLogger;
impl Logger for ConsoleLogger {
  fn log(&self, message: &str) {
    println!("[CONSOLE LOG]: {}", message);
  }
}

// 3. Define a service that depends on the abstraction
struct ReportService {
  logger: std::sync::Arc<SharedLogger>,
}

impl ReportService {
  fn generate_report(&self) {
    self.logger.log("Generating report...");
    self.logger.log("Report generated successfully.");
  }
}

fn main() {
  let container = Container::new([
    // Register the implementation under the trait's key.
    Dependency::of(|_| Ok(Box::new(ConsoleLogger) as SharedLogger)),
    // The service only knows about the trait.
    Dependency::of(|c: &Container| {
      Ok(ReportService {
        logger: c.get::<SharedLogger>()?,
      })
    }),
  ]);

  let report_service = container.get::<ReportService>().expect("service is registered");
  report_service.generate_report();
}
