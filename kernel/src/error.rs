use std::fmt::Display;

use error_stack::Context;

/// Shared error context for every layer of the rental service.
///
/// The first four variants are expected business outcomes surfaced to the
/// client as plain messages. `Concurrency` marks a lost conditional update on
/// an inventory row and resolves to the same user-visible outcome as
/// `GameNotAvailable`.
#[derive(Debug)]
pub enum KernelError {
    GameNotFound,
    GameNotAvailable,
    RentalNotFound,
    AlreadyReturned,
    UserNotFound,
    Unauthorized,
    Forbidden,
    Concurrency,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::GameNotFound => write!(f, "No such board game"),
            KernelError::GameNotAvailable => write!(f, "No copy of this game is available"),
            KernelError::RentalNotFound => write!(f, "No such rental"),
            KernelError::AlreadyReturned => write!(f, "Rental is already returned"),
            KernelError::UserNotFound => write!(f, "No such user"),
            KernelError::Unauthorized => write!(f, "Authentication required"),
            KernelError::Forbidden => write!(f, "Staff privilege required"),
            KernelError::Concurrency => write!(f, "Concurrency error"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
