// Domain layer: records, row decoding and the pure transformations over them.
// Nothing here performs I/O; network and storage live behind the traits in `ports`.

pub mod blog;
pub mod decode;
pub mod fallback;
pub mod model;
pub mod ports;
pub mod projects;
pub mod skills;
