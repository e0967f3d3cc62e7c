pub mod dotenv;
pub mod process_env;

pub use dotenv::{DotenvOutcome, load_dotenv};
pub use process_env::ProcessEnv;
