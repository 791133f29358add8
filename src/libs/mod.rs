pub mod colin;
pub mod error;
pub mod hit;
pub mod io;
pub mod map;
pub mod rbh;
pub mod seqid;
pub mod split;
