use super::{format_timestamp, parse_timestamp, Store, StoreError};
use common::model::incident::{Incident, IncidentStatus, NewIncident, Severity};
use rusqlite::{params, Row};
use uuid::Uuid;

struct IncidentRow {
    id: String,
    location: String,
    datahall: String,
    description: String,
    severity: String,
    status: String,
    user_email: String,
    created_at: String,
    updated_at: String,
}

impl IncidentRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            location: row.get(1)?,
            datahall: row.get(2)?,
            description: row.get(3)?,
            severity: row.get(4)?,
            status: row.get(5)?,
            user_email: row.get(6)?,
            created_at: row.get(7)?,
            updated_at: row.get(8)?,
        })
    }

    fn into_incident(self) -> Result<Incident, StoreError> {
        let severity = Severity::parse(&self.severity)
            .ok_or_else(|| StoreError::Corrupt(format!("severity {:?}", self.severity)))?;
        let status = IncidentStatus::parse(&self.status)
            .ok_or_else(|| StoreError::Corrupt(format!("incident status {:?}", self.status)))?;
        Ok(Incident {
            id: self.id,
            location: self.location,
            datahall: self.datahall,
            description: self.description,
            severity,
            status,
            user_email: self.user_email,
            created_at: parse_timestamp(&self.created_at)?,
            updated_at: parse_timestamp(&self.updated_at)?,
        })
    }
}

impl Store {
    /// Stores each incident as `open`, one statement per row.
    pub async fn insert_incidents(
        &self,
        incidents: Vec<NewIncident>,
    ) -> Result<Vec<Incident>, StoreError> {
        if incidents.is_empty() {
            return Ok(Vec::new());
        }
        self.run(move |conn| {
            let mut stmt = conn.prepare(
                "INSERT INTO Incidents (Id, Location, DataHall, Description, Severity, Status,
                                        UserEmail, CreatedAt, UpdatedAt)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
            )?;
            let mut stored = Vec::with_capacity(incidents.len());
            for new in incidents {
                let incident = Incident {
                    id: Uuid::new_v4().to_string(),
                    location: new.location,
                    datahall: new.datahall,
                    description: new.description,
                    severity: new.severity,
                    status: IncidentStatus::Open,
                    user_email: new.user_email,
                    created_at: new.created_at,
                    updated_at: new.created_at,
                };
                stmt.execute(params![
                    incident.id,
                    incident.location,
                    incident.datahall,
                    incident.description,
                    incident.severity.as_str(),
                    incident.status.as_str(),
                    incident.user_email,
                    format_timestamp(&incident.created_at),
                ])?;
                stored.push(incident);
            }
            Ok(stored)
        })
        .await
    }

    /// Up to `limit` incidents, newest first.
    pub async fn recent_incidents(&self, limit: usize) -> Result<Vec<Incident>, StoreError> {
        self.run(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT Id, Location, DataHall, Description, Severity, Status, UserEmail,
                        CreatedAt, UpdatedAt
                 FROM Incidents ORDER BY CreatedAt DESC, rowid DESC LIMIT ?1",
            )?;
            let rows = stmt
                .query_map(params![limit as i64], IncidentRow::from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            rows.into_iter().map(IncidentRow::into_incident).collect()
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{SubsecRound, Utc};

    fn new_incident(description: &str, severity: Severity) -> NewIncident {
        NewIncident {
            location: "Data Center A".into(),
            datahall: "Hall A".into(),
            description: description.into(),
            severity,
            user_email: "a@b.com".into(),
            created_at: Utc::now().trunc_subsecs(6),
        }
    }

    #[actix_web::test]
    async fn incidents_are_stored_open() {
        let store = Store::open_in_memory().unwrap();
        let stored = store
            .insert_incidents(vec![
                new_incident("Rack R1 issues: PDU A: Powered-Off", Severity::Critical),
                new_incident("Rack R2 issues: PSU 1 at U3: Amber", Severity::Medium),
            ])
            .await
            .unwrap();
        assert_eq!(stored.len(), 2);
        assert!(stored.iter().all(|i| i.status == IncidentStatus::Open));

        let listed = store.recent_incidents(20).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, stored[1].id);
        assert_eq!(listed[1], stored[0]);
    }

    #[actix_web::test]
    async fn empty_batch_is_a_no_op() {
        let store = Store::open_in_memory().unwrap();
        assert!(store.insert_incidents(Vec::new()).await.unwrap().is_empty());
        assert!(store.recent_incidents(20).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn unknown_severity_is_reported_as_corrupt() {
        let store = Store::open_in_memory().unwrap();
        store
            .with_conn(|conn| {
                conn.execute(
                    "INSERT INTO Incidents VALUES ('i', 'DC', 'Hall', 'desc', 'severe', 'open',
                     'a@b.com', '2024-05-01T10:00:00.000000Z', '2024-05-01T10:00:00.000000Z')",
                    [],
                )?;
                Ok(())
            })
            .unwrap();
        let err = store.recent_incidents(20).await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }
}
