use crate::generator::{Count, FullGenerator, Generator, Many, State};
use std::{marker::PhantomData, ops};

/// Generates any value of `T`, with a small bias towards its edge cases.
#[derive(Debug)]
pub struct Full<T>(PhantomData<T>);

impl<T> Copy for Full<T> {}
impl<T> Clone for Full<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Default for Full<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl FullGenerator for bool {
    type Item = Self;
    type Generator = [bool; 2];
    fn generator() -> Self::Generator {
        [false, true]
    }
}

impl Full<char> {
    const SPECIAL: [char; 3] = ['\u{0000}', char::MAX, char::REPLACEMENT_CHARACTER];
}

impl Generator for Full<char> {
    type Item = char;

    fn generate(&mut self, state: &mut State) -> Self::Item {
        match state.random.u8(..) {
            0..=250 => state.random.char('\u{0000}'..='\u{D7FF}'),
            251..=254 => state.random.char('\u{E000}'..=char::MAX),
            255 => Self::SPECIAL[state.random.usize(..Self::SPECIAL.len())],
        }
    }
}

impl FullGenerator for char {
    type Item = Self;
    type Generator = Full<char>;
    fn generator() -> Self::Generator {
        Full::default()
    }
}

impl FullGenerator for String {
    type Item = Self;
    type Generator = Many<Count, Full<char>, String>;
    fn generator() -> Self::Generator {
        Many::new(Count, Full::default())
    }
}

macro_rules! integer {
    ($($t:ident),*) => {
        $(
            impl Full<$t> {
                const SPECIAL: [$t; 3] = [0, $t::MIN, $t::MAX];
            }

            impl Generator for Full<$t> {
                type Item = $t;

                fn generate(&mut self, state: &mut State) -> Self::Item {
                    match state.random.u8(..) {
                        255 => Self::SPECIAL[state.random.usize(..Self::SPECIAL.len())],
                        _ => (state.random.$t(..) as f64 * state.size) as $t,
                    }
                }
            }

            impl FullGenerator for $t {
                type Item = Self;
                type Generator = Full<$t>;
                fn generator() -> Self::Generator {
                    Full::default()
                }
            }

            impl Generator for ops::Range<$t> {
                type Item = $t;
                #[inline]
                fn generate(&mut self, state: &mut State) -> Self::Item {
                    state.random.$t(self.clone())
                }
            }

            impl Generator for ops::RangeInclusive<$t> {
                type Item = $t;
                #[inline]
                fn generate(&mut self, state: &mut State) -> Self::Item {
                    state.random.$t(self.clone())
                }
            }
        )*
    };
}

macro_rules! floating {
    ($($t:ident),*) => {
        $(
            impl Full<$t> {
                const SPECIAL: [$t; 4] = [0., $t::MIN, $t::MAX, $t::EPSILON];
            }

            impl Generator for Full<$t> {
                type Item = $t;

                fn generate(&mut self, state: &mut State) -> Self::Item {
                    match state.random.u8(..) {
                        255 => Self::SPECIAL[state.random.usize(..Self::SPECIAL.len())],
                        _ => (state.random.$t() * 2. - 1.) * $t::MAX * state.size as $t,
                    }
                }
            }

            impl FullGenerator for $t {
                type Item = Self;
                type Generator = Full<$t>;
                fn generator() -> Self::Generator {
                    Full::default()
                }
            }

            impl Generator for ops::Range<$t> {
                type Item = $t;
                #[inline]
                fn generate(&mut self, state: &mut State) -> Self::Item {
                    self.start + state.random.$t() * (self.end - self.start)
                }
            }
        )*
    };
}

integer!(u8, u16, u32, u64, usize, u128, i8, i16, i32, i64, isize, i128);
floating!(f32, f64);
