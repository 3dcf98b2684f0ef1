// Fixed keys in the durable key-value store.
// These are global, not namespaced per user.
pub const WATCHLIST_KEY: &str = "watchlist";
pub const SESSION_TOKEN_KEY: &str = "token";
pub const NOTIFICATIONS_KEY: &str = "notifications";

// User-facing validation messages
pub const MSG_INVALID_QUANTITY: &str = "Quantity must be a positive number";
pub const MSG_INVALID_PRICE: &str = "Valid price is required for this order type";
pub const MSG_ORDER_TOO_LARGE: &str = "Order value is too large";
pub const MSG_SELECT_INSTRUMENT: &str = "Please select an instrument to add.";
pub const MSG_ALREADY_WATCHED: &str = "Instrument already in watchlist.";
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid email or password";
pub const MSG_INVALID_PAN: &str = "Invalid PAN format. Example: ABCDE1234F";
pub const MSG_SHORT_PASSWORD: &str = "Password must be at least 6 characters long.";
pub const MSG_ORDER_FAILED: &str = "Order failed";
pub const MSG_ORDER_TIMED_OUT: &str = "Order submission timed out";

// Status reported by the simulated execution
pub const MOCK_EXECUTED_STATUS: &str = "Executed (mock)";
