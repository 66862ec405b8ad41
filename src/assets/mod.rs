pub(crate) mod media;
