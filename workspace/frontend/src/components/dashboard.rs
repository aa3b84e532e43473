pub mod chart;
pub mod heatmap;
pub mod panels;
pub mod stats;
pub mod view;

pub use view::Dashboard;
