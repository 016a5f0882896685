//! Desktop-only components. Reusable widgets live in `leviathan-ui`.

mod auth_gate;
mod biodiversity_map;
mod charts;
mod file_upload;
mod nav_header;

pub use auth_gate::SignInRequired;
pub use biodiversity_map::BiodiversityMap;
pub use charts::{BarChart, Datum, DonutChart, LineChart};
pub use file_upload::{FileDropZone, PickedFile};
pub use nav_header::NavHeader;
