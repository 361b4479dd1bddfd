pub mod block_quote;
pub mod bullet;
pub mod checklist;
pub mod code_fence;
pub mod heading;
pub mod rule;

pub use block_quote::BlockQuote;
pub use bullet::Bullet;
pub use checklist::Checklist;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use rule::Rule;
