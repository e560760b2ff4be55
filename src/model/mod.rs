//! Record types for the reference catalog

mod directive;
mod guide;
mod instruction;
mod instruction_type;
mod register;
mod syscall;

pub use directive::Directive;
pub use guide::{Guide, GuideBlock};
pub use instruction::{Category, Encoding, EncodingKind, Instruction};
pub use instruction_type::{Field, InstructionType};
pub use register::{Preservation, Register};
pub use syscall::Syscall;
