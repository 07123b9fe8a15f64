//! Editable per-rack state of the inspection flow.
//!
//! A `RackForm` mirrors the rack card in the UI: free-text inputs plus one
//! optional detail block per device kind (present when the device checkbox
//! is ticked). `finalize` turns it into a `RackFinding`.

use crate::model::device::{DeviceFinding, DeviceKind, PduStatus, PsuStatus, RdhxStatus};
use crate::model::inspection::RackFinding;
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PsuForm {
    pub psu_id: String,
    pub u_height: String,
    pub status: Option<PsuStatus>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PduForm {
    pub pdu_id: String,
    pub status: Option<PduStatus>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RdhxForm {
    pub status: Option<RdhxStatus>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RackForm {
    pub location: String,
    pub psu: Option<PsuForm>,
    pub pdu: Option<PduForm>,
    pub rdhx: Option<RdhxForm>,
    pub comments: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RackFormError {
    #[error("rack location is required")]
    MissingLocation,
    #[error("select at least one device")]
    NoDevices,
    #[error("{device} {field} is required")]
    MissingDetail {
        device: DeviceKind,
        field: &'static str,
    },
    #[error("U height must be a positive number, got {0:?}")]
    InvalidUHeight(String),
}

impl RackForm {
    /// Ticks or clears the checkbox of a device kind.
    pub fn toggle(&mut self, kind: DeviceKind, checked: bool) {
        match kind {
            DeviceKind::Psu => set_checked(&mut self.psu, checked),
            DeviceKind::Pdu => set_checked(&mut self.pdu, checked),
            DeviceKind::Rdhx => set_checked(&mut self.rdhx, checked),
        }
    }

    pub fn is_checked(&self, kind: DeviceKind) -> bool {
        match kind {
            DeviceKind::Psu => self.psu.is_some(),
            DeviceKind::Pdu => self.pdu.is_some(),
            DeviceKind::Rdhx => self.rdhx.is_some(),
        }
    }

    pub fn finalize(&self) -> Result<RackFinding, RackFormError> {
        let location = self.location.trim();
        if location.is_empty() {
            return Err(RackFormError::MissingLocation);
        }

        let mut findings = Vec::new();
        if let Some(psu) = &self.psu {
            findings.push(finalize_psu(psu)?);
        }
        if let Some(pdu) = &self.pdu {
            let pdu_id = required(&pdu.pdu_id, DeviceKind::Pdu, "id")?;
            let status = pdu.status.ok_or(RackFormError::MissingDetail {
                device: DeviceKind::Pdu,
                field: "status",
            })?;
            findings.push(DeviceFinding::Pdu { pdu_id, status });
        }
        if let Some(rdhx) = &self.rdhx {
            let status = rdhx.status.ok_or(RackFormError::MissingDetail {
                device: DeviceKind::Rdhx,
                field: "status",
            })?;
            findings.push(DeviceFinding::Rdhx { status });
        }
        if findings.is_empty() {
            return Err(RackFormError::NoDevices);
        }

        let comments = self.comments.trim();
        Ok(RackFinding {
            location: location.to_string(),
            findings,
            comments: (!comments.is_empty()).then(|| comments.to_string()),
        })
    }
}

fn set_checked<T: Default>(slot: &mut Option<T>, checked: bool) {
    if checked {
        slot.get_or_insert_with(T::default);
    } else {
        *slot = None;
    }
}

fn finalize_psu(psu: &PsuForm) -> Result<DeviceFinding, RackFormError> {
    let psu_id = required(&psu.psu_id, DeviceKind::Psu, "id")?;
    let raw_height = required(&psu.u_height, DeviceKind::Psu, "U height")?;
    let u_height = match raw_height.parse::<u32>() {
        Ok(h) if h > 0 => h,
        _ => return Err(RackFormError::InvalidUHeight(raw_height)),
    };
    let status = psu.status.ok_or(RackFormError::MissingDetail {
        device: DeviceKind::Psu,
        field: "status",
    })?;
    Ok(DeviceFinding::Psu {
        psu_id,
        u_height,
        status,
    })
}

fn required(value: &str, device: DeviceKind, field: &'static str) -> Result<String, RackFormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(RackFormError::MissingDetail { device, field })
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn psu_rack() -> RackForm {
        RackForm {
            location: " R07 ".into(),
            psu: Some(PsuForm {
                psu_id: "2".into(),
                u_height: "14".into(),
                status: Some(PsuStatus::PoweredOff),
            }),
            ..RackForm::default()
        }
    }

    #[test]
    fn finalize_builds_tagged_findings() {
        let finding = psu_rack().finalize().unwrap();
        assert_eq!(finding.location, "R07");
        assert_eq!(finding.comments, None);
        assert_eq!(
            finding.findings,
            vec![DeviceFinding::Psu {
                psu_id: "2".into(),
                u_height: 14,
                status: PsuStatus::PoweredOff
            }]
        );
    }

    #[test]
    fn rack_without_devices_is_rejected() {
        let form = RackForm {
            location: "R01".into(),
            ..RackForm::default()
        };
        assert_eq!(form.finalize(), Err(RackFormError::NoDevices));
        assert_eq!(RackForm::default().finalize(), Err(RackFormError::MissingLocation));
    }

    #[test]
    fn checked_device_needs_its_details() {
        let mut form = psu_rack();
        form.toggle(DeviceKind::Rdhx, true);
        assert_eq!(
            form.finalize(),
            Err(RackFormError::MissingDetail {
                device: DeviceKind::Rdhx,
                field: "status"
            })
        );

        form.toggle(DeviceKind::Rdhx, false);
        assert!(form.finalize().is_ok());
    }

    #[test]
    fn u_height_must_be_positive() {
        let mut form = psu_rack();
        if let Some(psu) = form.psu.as_mut() {
            psu.u_height = "0".into();
        }
        assert_eq!(
            form.finalize(),
            Err(RackFormError::InvalidUHeight("0".into()))
        );
    }

    #[test]
    fn toggling_keeps_entered_details() {
        let mut form = psu_rack();
        form.toggle(DeviceKind::Psu, true);
        assert_eq!(form.psu.as_ref().map(|p| p.psu_id.as_str()), Some("2"));
        assert!(form.is_checked(DeviceKind::Psu));
        form.toggle(DeviceKind::Psu, false);
        assert!(!form.is_checked(DeviceKind::Psu));
    }
}
