/// Greeting returned by every registered function
pub const DEFAULT_RESPONSE_BODY: &str = "Hello from Firebase!";

/// Name of the first default function
pub const HELLO_WORLD_NAME: &str = "helloWorld";

/// Log message recorded on each `helloWorld` invocation
pub const HELLO_WORLD_LOG_MESSAGE: &str = "Hello logs!";

/// Name of the second default function
pub const MY_FUNCTION_NAME: &str = "myFunctionName";

/// Log message recorded on each `myFunctionName` invocation
pub const MY_FUNCTION_LOG_MESSAGE: &str = "Function executed successfully!";

/// Ceiling on concurrently running invocations, shared by all functions
pub const DEFAULT_MAX_INSTANCES: usize = 10;

pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port used by the local Functions emulator
pub const DEFAULT_PORT: u16 = 5001;

/// Response header carrying the per-invocation execution id
pub const EXECUTION_ID_HEADER: &str = "function-execution-id";

/// Directory and file name of the rotating log file
pub const LOG_DIRECTORY: &str = "logs";
pub const LOG_FILE_NAME: &str = "functions.log";
