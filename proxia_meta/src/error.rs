use std::result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MissingMethod {
        type_name: &'static str,
        name: String,
    },
    WrongArgumentCount {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
    WrongArgument {
        name: &'static str,
        index: usize,
        expected: &'static str,
        actual: &'static str,
    },
    WrongInstance {
        expected: &'static str,
        actual: &'static str,
    },
}

pub type Result<T = ()> = result::Result<T, Error>;

macro_rules! error {
    ($t:ty) => {
        impl std::error::Error for $t {}

        impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                <Self as std::fmt::Debug>::fmt(self, f)
            }
        }
    };
}

error!(Error);
