pub mod image_utils;
