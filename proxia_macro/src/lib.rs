#[macro_export]
macro_rules! count {
    () => { 0 };
    ($v:ident $(,$vs:ident)*) => {1 + $crate::count!($($vs),*) };
}

#[macro_export]
macro_rules! recurse {
    ($m:ident) => { $m!(); };
    ($m:ident, $p:ident, $t:ident $(,$ps:ident, $ts:ident)* $(,)?) => {
        $m!($p, $t $(,$ps, $ts)*);
        $crate::recurse!($m $(,$ps, $ts)*);
    };
}

#[macro_export]
macro_rules! recurse_8 {
    ($m:ident) => {
        $crate::recurse!($m, p0, T0, p1, T1, p2, T2, p3, T3, p4, T4, p5, T5, p6, T6, p7, T7);
    };
}
