pub mod alpha_blit;
pub mod cpu_overlay_compositor;
