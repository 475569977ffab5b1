pub(crate) mod clock;
pub(crate) mod scale;
pub(crate) mod timer;
