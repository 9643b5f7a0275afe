mod common;
mod comparison;
mod social;
