//! Brand colour scales.

use crate::foundation::core::Color;

pub const INDIGO_500: Color = Color::rgb(99, 102, 241);
pub const INDIGO_600: Color = Color::rgb(79, 70, 229);
pub const INDIGO_700: Color = Color::rgb(67, 56, 202);
pub const INDIGO_800: Color = Color::rgb(55, 48, 163);
pub const INDIGO_900: Color = Color::rgb(49, 46, 129);
pub const CYAN_400: Color = Color::rgb(34, 211, 238);
pub const CYAN_500: Color = Color::rgb(6, 182, 212);

pub const WHITE: Color = Color::WHITE;
pub const BLACK: Color = Color::BLACK;
pub const GRAY_50: Color = Color::rgb(250, 250, 250);
pub const GRAY_100: Color = Color::rgb(244, 244, 245);
pub const GRAY_200: Color = Color::rgb(228, 228, 231);
pub const GRAY_300: Color = Color::rgb(212, 212, 216);
pub const GRAY_400: Color = Color::rgb(161, 161, 170);
pub const GRAY_500: Color = Color::rgb(113, 113, 122);
pub const GRAY_600: Color = Color::rgb(82, 82, 91);
pub const GRAY_700: Color = Color::rgb(63, 63, 70);
pub const GRAY_800: Color = Color::rgb(39, 39, 42);
pub const GRAY_900: Color = Color::rgb(24, 24, 27);

pub const EMERALD_500: Color = Color::rgb(16, 185, 129);
pub const RED_400: Color = Color::rgb(248, 113, 113);
pub const AMBER_400: Color = Color::rgb(251, 191, 36);
pub const GREEN_400: Color = Color::rgb(74, 222, 128);
pub const VIOLET_500: Color = Color::rgb(139, 92, 246);
pub const BLUE_500: Color = Color::rgb(59, 130, 246);
pub const TEAL_500: Color = Color::rgb(20, 184, 166);

/// Traffic-light window controls, left to right.
pub const WINDOW_DOTS: [Color; 3] = [RED_400, AMBER_400, GREEN_400];
