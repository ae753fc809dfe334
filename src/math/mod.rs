// Copyright 2020 @TwoCookingMice

pub mod constants;
pub mod frame;
pub mod spectrum;
