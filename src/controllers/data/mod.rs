pub mod draw_frame;
