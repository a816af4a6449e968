
// Wrap std:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use std::{
        cmp,
        convert,
        fmt,
        iter,
        mem,
        ops,
        str,
        string,
    };

    pub use std::vec::Vec;
    pub use std::vec;
}
