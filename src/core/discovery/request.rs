/// What a discovery run needs to know about the live view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryRequest {
    pub current_palette: usize,
    pub drawable_width: u32,
    pub drawable_height: u32,
}
