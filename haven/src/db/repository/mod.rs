mod chats;
mod reports;
mod shares;

pub use chats::ChatRepository;
pub use reports::ReportRepository;
pub use shares::ShareRepository;
