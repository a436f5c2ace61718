pub mod live_ticker;
pub mod product_details;
pub mod product_grid;
pub mod toast;
pub mod toolbar;
pub mod viewer_360;

pub use live_ticker::LiveTicker;
pub use product_details::ProductDetails;
pub use product_grid::ProductGrid;
pub use toast::{ToastHost, Toasts};
pub use toolbar::Toolbar;
pub use viewer_360::{ActiveViewer, Viewer360};
