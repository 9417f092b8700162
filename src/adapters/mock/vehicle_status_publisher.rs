use crate::domain::VehicleStatusSignal;
use crate::ports::vehicle_status_publisher::{
    Result, VehicleStatusPublisher as VehicleStatusPublisherTrait,
};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock implementation of VehicleStatusPublisher
///
/// Records every signal in emission order.
#[allow(dead_code)]
pub struct VehicleStatusPublisher {
    published: Mutex<Vec<VehicleStatusSignal>>,
}

#[allow(dead_code)]
impl VehicleStatusPublisher {
    pub fn new() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
        }
    }

    /// Signals published so far, in order
    pub fn published(&self) -> Vec<VehicleStatusSignal> {
        self.published.lock().unwrap().clone()
    }
}

impl Default for VehicleStatusPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VehicleStatusPublisherTrait for VehicleStatusPublisher {
    async fn publish(&self, signal: VehicleStatusSignal) -> Result<()> {
        tracing::debug!(
            car_id = %signal.car_id.value(),
            status_code = signal.status.code(),
            "vehicle status signal"
        );
        self.published.lock().unwrap().push(signal);
        Ok(())
    }
}
