pub mod corrupt;
pub mod decode;
pub mod encode;
pub mod inject;
pub mod pack;
pub mod unpack;
