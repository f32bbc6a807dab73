pub mod generator;
pub mod primitive;

pub use self::{
    generator::{Constant, Count, Flatten, FullGenerator, Generator, Many, Map, Sample, State, With},
    primitive::Full,
};
