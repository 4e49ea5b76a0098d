pub mod menu_codec;
