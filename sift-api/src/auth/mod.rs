mod extractor;
mod router;
mod token;

pub use extractor::{AuthUser, OptionalAuthUser};
pub use router::router;
pub use token::{Claims, TokenError, TokenSigner};
