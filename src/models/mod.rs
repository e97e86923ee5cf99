pub mod account;
pub mod routine;
pub mod set_log;
pub mod table_row;

pub use account::{Account, CreateAccount, LoginCredentials};
pub use routine::{RoutineEntry, RoutineExerciseForm, DEFAULT_ROUTINE};
pub use set_log::{CreateSetLog, ProgressPoint, SetLog};
pub use table_row::TableRow;
