// src\distributions\mod.rs

// Discrete
pub mod Binomial;
