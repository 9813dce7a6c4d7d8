pub mod directory_overlay_store;
