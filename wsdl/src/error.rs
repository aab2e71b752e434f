use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Binding({0}) is not defined")]
    UnknownBinding(String),

    #[error("PortType({0}) is not defined")]
    UnknownPortType(String),

    #[error("Message({0}) is not defined")]
    UnknownMessage(String),
}
