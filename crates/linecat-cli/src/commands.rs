pub mod molecules;
pub mod transitions;

use linecat::engine::config::ReaderConfig;
use linecat::engine::report::{CatalogEvent, CatalogReporter};
use linecat::workflows::query::CatalogReader;

/// Builds a reader that prints truncation notices to stderr.
pub fn open_reader(config: &ReaderConfig) -> CatalogReader<'static> {
    CatalogReader::from_config(config).with_reporter(CatalogReporter::with_callback(Box::new(
        |event: CatalogEvent| {
            if let CatalogEvent::Truncated(warning) = event {
                eprintln!("Note: {}", warning);
            }
        },
    )))
}
