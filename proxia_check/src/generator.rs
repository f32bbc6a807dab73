use fastrand::Rng;
use std::{iter::FromIterator, marker::PhantomData, mem::take, ops::Range};

/// Types that know how to generate any of their values.
pub trait FullGenerator {
    type Item;
    type Generator: Generator<Item = Self::Item>;
    fn generator() -> Self::Generator;
}

pub trait Generator {
    type Item;
    fn generate(&mut self, state: &mut State) -> Self::Item;

    #[inline]
    fn map<T, F: FnMut(Self::Item) -> T>(self, map: F) -> Map<Self, T, F>
    where
        Self: Sized,
    {
        Map(self, map, PhantomData)
    }

    #[inline]
    fn bind<G: Generator, F: FnMut(Self::Item) -> G>(self, bind: F) -> Flatten<Map<Self, G, F>>
    where
        Self: Sized,
    {
        self.map(bind).flatten()
    }

    #[inline]
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: Generator,
    {
        Flatten(self)
    }

    #[inline]
    fn sample(self, count: usize) -> Sample<Self>
    where
        Self: Sized,
    {
        Sample {
            generator: self,
            index: 0,
            count,
            random: Rng::new(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct State {
    pub random: Rng,
    /// Grows from 0 to 1 over a sample; generators scale their output by it.
    pub size: f64,
}

pub struct Sample<G> {
    generator: G,
    random: Rng,
    index: usize,
    count: usize,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Constant<T>(pub T);
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Map<G, T, F>(pub G, pub F, PhantomData<T>);
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Flatten<G>(pub G);
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct With<T, F = fn(&mut State) -> T>(pub F, PhantomData<T>);
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Many<C, G, F>(pub C, pub G, PhantomData<F>);
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Count;

impl Count {
    pub const RANGE: Range<usize> = 0..256;
}

impl Default for State {
    fn default() -> Self {
        Self {
            random: Rng::new(),
            size: 1.,
        }
    }
}

impl<T, F: FnMut(&mut State) -> T> With<T, F> {
    #[inline]
    pub fn new(with: F) -> Self {
        With(with, PhantomData)
    }
}

impl<C: Generator<Item = usize>, G: Generator, F: FromIterator<G::Item>> Many<C, G, F> {
    #[inline]
    pub fn new(count: C, generator: G) -> Self {
        Many(count, generator, PhantomData)
    }
}

impl<G: Generator> Iterator for Sample<G> {
    type Item = G::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.count {
            let size = (self.index as f64 / self.count as f64).min(1.);
            self.index += 1;
            let mut state = State {
                random: take(&mut self.random),
                size,
            };
            let item = self.generator.generate(&mut state);
            self.random = state.random;
            Some(item)
        } else {
            None
        }
    }
}

impl<G: Generator> ExactSizeIterator for Sample<G> {
    #[inline]
    fn len(&self) -> usize {
        self.count - self.index
    }
}

impl<T, F: FnMut(&mut State) -> T> Generator for With<T, F> {
    type Item = T;
    #[inline]
    fn generate(&mut self, state: &mut State) -> Self::Item {
        (self.0)(state)
    }
}

impl<T: Clone> Generator for Constant<T> {
    type Item = T;
    #[inline]
    fn generate(&mut self, _: &mut State) -> Self::Item {
        self.0.clone()
    }
}

impl Generator for Count {
    type Item = usize;
    #[inline]
    fn generate(&mut self, state: &mut State) -> Self::Item {
        let end = (Count::RANGE.end as f64 * state.size).ceil() as usize;
        state.random.usize(Count::RANGE.start..end.clamp(1, Count::RANGE.end))
    }
}

impl<G: Generator, T, F: FnMut(G::Item) -> T> Generator for Map<G, T, F> {
    type Item = T;
    #[inline]
    fn generate(&mut self, state: &mut State) -> Self::Item {
        self.1(self.0.generate(state))
    }
}

impl<G: Generator<Item = impl Generator>> Generator for Flatten<G> {
    type Item = <G::Item as Generator>::Item;
    #[inline]
    fn generate(&mut self, state: &mut State) -> Self::Item {
        self.0.generate(state).generate(state)
    }
}

impl<T: Clone, const N: usize> Generator for [T; N] {
    type Item = T;
    #[inline]
    fn generate(&mut self, state: &mut State) -> Self::Item {
        self[state.random.usize(0..N)].clone()
    }
}

impl<C: Generator<Item = usize>, G: Generator, F: FromIterator<G::Item>> Generator
    for Many<C, G, F>
{
    type Item = F;
    #[inline]
    fn generate(&mut self, state: &mut State) -> Self::Item {
        Iterator::map(0..self.0.generate(state), |_| self.1.generate(state)).collect()
    }
}

impl<G: FullGenerator> FullGenerator for Vec<G> {
    type Item = Vec<G::Item>;
    type Generator = Many<Count, G::Generator, Self::Item>;
    #[inline]
    fn generator() -> Self::Generator {
        Many::new(Count, G::generator())
    }
}

macro_rules! tuple {
    ($($p:ident, $t:ident),*) => {
        impl<$($t: Generator,)*> Generator for ($($t,)*) {
            type Item = ($($t::Item,)*);
            #[inline]
            #[allow(unused_variables)]
            fn generate(&mut self, state: &mut State) -> Self::Item {
                let ($($p,)*) = self;
                ($($p.generate(state),)*)
            }
        }

        impl<$($t: FullGenerator,)*> FullGenerator for ($($t,)*) {
            type Item = ($($t::Item,)*);
            type Generator = ($($t::Generator,)*);
            #[inline]
            fn generator() -> Self::Generator {
                ($($t::generator(),)*)
            }
        }
    };
}

proxia_macro::recurse_8!(tuple);
