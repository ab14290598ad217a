mod command;

pub use command::run;
