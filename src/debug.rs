/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct with the performance metrics
 * shown by the windowed frontend's overlay.
 */

use std::time::Duration;

// Debug information to display
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub tick_count: u64,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            tick_count: 0,
        }
    }
}
