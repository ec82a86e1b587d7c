pub mod addon;
pub mod barista;
pub mod beverage;
pub mod constants;
pub mod errors;
pub mod ingredient;
pub mod order;
pub mod orders_reader;
pub mod price;
pub mod statistics;

use std::{env, process};

use log::{error, LevelFilter};
use simple_logger::SimpleLogger;

use barista::Barista;
use errors::CoffeeShopError;
use order::Order;
use orders_reader::read_orders;

fn main() {
    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Info).init() {
        eprintln!("Could not start the logger: {}", err);
    }

    if let Err(err) = run(env::args().nth(1)) {
        error!("[COFFEE SHOP] Could not prepare the orders: {:?}", err);
        process::exit(1);
    }
}

fn run(orders_path: Option<String>) -> Result<(), CoffeeShopError> {
    let orders = match orders_path {
        Some(path) => read_orders(path)?,
        None => vec![Order::demo()],
    };

    let mut barista = Barista::new();
    barista.prepare_all(&orders);
    barista.statistics().print_statistics();
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn should_prepare_the_demo_order_without_a_file() {
        assert!(run(None).is_ok());
    }

    #[test]
    fn should_prepare_the_orders_of_a_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "orders": [ {{ "addons": ["sugar"] }} ] }}"#).unwrap();
        let path = file.path().to_string_lossy().into_owned();
        assert!(run(Some(path)).is_ok());
    }

    #[test]
    fn should_fail_when_the_orders_file_is_missing() {
        let result = run(Some("this-file-does-not-exist.json".to_string()));
        assert!(matches!(result, Err(CoffeeShopError::FileReaderError)));
    }

    #[test]
    fn should_fail_when_the_orders_file_is_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "orders": [ {{ "addons": ["caramel"] }} ] }}"#).unwrap();
        let path = file.path().to_string_lossy().into_owned();
        assert!(matches!(run(Some(path)), Err(CoffeeShopError::InvalidOrdersFormat)));
    }
}
