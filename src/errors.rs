pub const ERR_NOT_OWNER: &str = "You aren't the owner";
pub const ERR_NOT_LEGATEE: &str = "You aren't a legatee";

pub const ERR_LEGATEE_NOT_FOUND: &str = "Legatee not found";
pub const ERR_LEGATEE_ALREADY_REGISTERED: &str = "Legatee already registered";

pub const ERR_NOT_RELEASED: &str = "Legacy distribution is not allowed yet";
pub const ERR_ALREADY_CLAIMED: &str = "Legacy already claimed";
pub const ERR_NOTHING_TO_CLAIM: &str = "Nothing to claim";
pub const ERR_INSUFFICIENT_FUNDS: &str = "Insufficient funds";
