mod bid;
mod tender;

pub use {
    bid::*,
    tender::*,
};
