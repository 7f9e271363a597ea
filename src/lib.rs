pub type StrError = &'static str;

mod descent;
pub mod enums;
mod objective_trait;
mod point;
mod quadratic;
mod sin_cos;
mod table;
mod trajectory;

pub use descent::*;
pub use enums::*;
pub use objective_trait::*;
pub use point::*;
pub use quadratic::*;
pub use sin_cos::*;
pub use table::*;
pub use trajectory::*;
