/// Cantidad de pedidos que preparo la cafeteria
#[derive(Debug, Default)]
pub struct SalesStatistics {
    processed: u64,
}

impl SalesStatistics {
    pub fn new() -> SalesStatistics {
        SalesStatistics::default()
    }

    pub fn record(&mut self) {
        self.processed += 1;
    }

    pub fn processed(&self) -> u64 {
        self.processed
    }

    pub fn print_statistics(&self) {
        println!("{}", self.summary());
    }

    fn summary(&self) -> String {
        format!("[STATISTICS] Orders processed={}", self.processed)
    }
}
