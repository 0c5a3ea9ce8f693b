pub(crate) mod date;
pub(crate) mod logger;
pub(crate) mod prompt;
pub(crate) mod timezone;

pub(crate) use date::{parse_date, parse_month};
pub(crate) use logger::init_logger;
pub(crate) use prompt::confirm;
pub(crate) use timezone::Timezone;
