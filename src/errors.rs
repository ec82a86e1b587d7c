#[derive(Debug)]
pub enum CoffeeShopError {
    FileReaderError,
    InvalidOrdersFormat,
}

impl From<serde_json::Error> for CoffeeShopError {
    fn from(_: serde_json::Error) -> Self {
        CoffeeShopError::InvalidOrdersFormat
    }
}
