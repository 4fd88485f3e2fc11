use crate::types::HealthRes;

/// Simple health service used by the REST API.
///
/// This service provides a standardised way to check the health status of the ShortUID service.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Reports the service health.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "ShortUID is alive".into(),
        }
    }
}
