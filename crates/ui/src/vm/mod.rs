mod config_vm;
mod results_vm;
mod session_vm;

pub use config_vm::{decode_config, encode_operation, encode_target};
pub use results_vm::{ResultsVm, ReviewItemVm, map_results};
pub use session_vm::{SessionIntent, SessionOutcome, SessionVm};
