pub mod dataset;
pub mod scale;
pub mod summary;
pub mod types;

pub use dataset::{DataPoint, Series, dataset_from_json_str, series_from_json_str};
pub use scale::{BandScale, ColorScale, LinearScale};
pub use summary::{DataSummary, summarize, summarize_series};
pub use types::{CanvasSize, Dimensions};
