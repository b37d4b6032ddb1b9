#[cfg(test)]
mod tests {
    use crate::error::{is_unique_violation, DbError};
    use crate::{
        AppointmentRepository, CalendarCredentialsRepository, DbClient, ScheduleWindowRepository,
        SqlScheduleStore, WindowKind, WorkingHoursRepository,
    };
    use agenda_common::models::{
        AppointmentDraft, AppointmentFilter, AppointmentStatus, CalendarCredentials, DayOfWeek,
        NewAppointment, NewScheduleWindow, WorkingHours,
    };
    use agenda_common::TenantContext;
    use agenda_config::DatabaseConfig;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    const SALON: TenantContext = TenantContext { business_id: 1 };
    const OTHER_SALON: TenantContext = TenantContext { business_id: 2 };

    async fn test_store(max_connections: u32) -> (TempDir, SqlScheduleStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let url = format!("sqlite://{}", dir.path().join("agenda.db").display());
        let client = DbClient::from_config(&DatabaseConfig {
            url,
            max_connections: Some(max_connections),
        })
        .await
        .expect("pool");
        let store = SqlScheduleStore::new(client);
        store.init_schema().await.expect("schema");
        (dir, store)
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 3).unwrap()
    }

    fn booking(start: &str, end: &str, client: &str) -> NewAppointment {
        NewAppointment {
            professional_id: 5,
            date: day(),
            start: start.to_string(),
            end: end.to_string(),
            draft: AppointmentDraft {
                service_id: 1,
                client_id: None,
                client_name: client.to_string(),
                client_phone: Some("+54 9 11 5555-0000".to_string()),
                amount_paid: 0.0,
                amount_due: 2500.0,
                notes: None,
            },
        }
    }

    #[tokio::test]
    async fn reserve_slot_inserts_pending_row() {
        let (_dir, store) = test_store(1).await;

        let created = store
            .reserve_slot(&SALON, booking("10:00", "11:00", "Ana"))
            .await
            .unwrap();

        assert!(created.id > 0);
        assert_eq!(created.status, AppointmentStatus::Pending);
        assert_eq!(created.start, "10:00");
        assert_eq!(created.client_id, None);
        assert_eq!(created.amount_due, 2500.0);

        let found = store.find_appointment(&SALON, created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn second_reservation_of_same_start_is_slot_taken() {
        let (_dir, store) = test_store(1).await;

        store
            .reserve_slot(&SALON, booking("11:00", "12:00", "Ana"))
            .await
            .unwrap();
        let err = store
            .reserve_slot(&SALON, booking("11:00", "12:00", "Bea"))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::SlotTaken { ref start, .. } if start == "11:00"));
        assert!(err.is_conflict());
        let all = store
            .list_appointments(&SALON, &AppointmentFilter::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn walk_in_booking_with_null_columns_reads_back() {
        let (_dir, store) = test_store(1).await;
        let mut walk_in = booking("12:00", "13:00", "Walk-in");
        walk_in.draft.client_phone = None;

        let created = store.reserve_slot(&SALON, walk_in).await.unwrap();
        assert_eq!(created.client_id, None);
        assert_eq!(created.client_phone, None);
        assert_eq!(created.notes, None);

        let listed = store
            .list_appointments_for_day(&SALON, 5, day())
            .await
            .unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_reservations_produce_exactly_one_row() {
        let (_dir, store) = test_store(5).await;
        let clients = ["Ana", "Bea", "Caro", "Dani", "Eva", "Flor"];

        for start in ["09:00", "10:00", "11:00", "12:00"] {
            let handles: Vec<_> = clients
                .iter()
                .map(|client| {
                    let store = store.clone();
                    let appointment = booking(start, "23:00", client);
                    tokio::spawn(async move { store.reserve_slot(&SALON, appointment).await })
                })
                .collect();

            let mut ok = 0;
            let mut conflicts = 0;
            for handle in handles {
                match handle.await.unwrap() {
                    Ok(_) => ok += 1,
                    Err(e) if e.is_conflict() => conflicts += 1,
                    Err(e) => panic!("reservation at {} failed: {}", start, e),
                }
            }
            assert_eq!((ok, conflicts), (1, clients.len() - 1));
        }

        let rows = store
            .list_appointments_for_day(&SALON, 5, day())
            .await
            .unwrap();
        assert_eq!(rows.len(), 4);
    }

    #[tokio::test]
    async fn unique_index_rejects_duplicate_live_rows() {
        let (_dir, store) = test_store(1).await;
        let insert = "INSERT INTO appointments (business_id, service_id, professional_id, \
                      client_name, date, start_time, end_time, status) \
                      VALUES (1, 1, 5, 'Ana', '2025-06-03', '09:00', '10:00', 'pending')";

        sqlx::query(insert)
            .execute(store.db_client().pool())
            .await
            .unwrap();
        let err = sqlx::query(insert)
            .execute(store.db_client().pool())
            .await
            .unwrap_err();

        assert!(is_unique_violation(&err));
    }

    #[tokio::test]
    async fn cancelled_appointment_releases_its_slot() {
        let (_dir, store) = test_store(1).await;

        let first = store
            .reserve_slot(&SALON, booking("15:00", "16:00", "Ana"))
            .await
            .unwrap();
        let cancelled = store
            .update_appointment_status(&SALON, first.id, AppointmentStatus::Cancelled)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cancelled.status, AppointmentStatus::Cancelled);

        let second = store
            .reserve_slot(&SALON, booking("15:00", "16:00", "Bea"))
            .await
            .unwrap();
        assert_ne!(second.id, first.id);

        // reviving the cancelled row would double-book
        let err = store
            .update_appointment_status(&SALON, first.id, AppointmentStatus::Confirmed)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation(_)));
    }

    #[tokio::test]
    async fn status_update_of_unknown_id_is_none() {
        let (_dir, store) = test_store(1).await;
        let updated = store
            .update_appointment_status(&SALON, 999, AppointmentStatus::Confirmed)
            .await
            .unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn tenants_do_not_see_each_other() {
        let (_dir, store) = test_store(1).await;

        let mine = store
            .reserve_slot(&SALON, booking("10:00", "11:00", "Ana"))
            .await
            .unwrap();
        // same professional id and slot in another business is independent
        store
            .reserve_slot(&OTHER_SALON, booking("10:00", "11:00", "Bea"))
            .await
            .unwrap();

        assert!(store
            .find_appointment(&OTHER_SALON, mine.id)
            .await
            .unwrap()
            .is_none());
        assert!(store
            .update_appointment_status(&OTHER_SALON, mine.id, AppointmentStatus::Cancelled)
            .await
            .unwrap()
            .is_none());
        assert_eq!(
            store
                .list_appointments_for_day(&SALON, 5, day())
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn filter_by_status_and_order() {
        let (_dir, store) = test_store(1).await;
        let early = store
            .reserve_slot(&SALON, booking("09:00", "10:00", "Ana"))
            .await
            .unwrap();
        let late = store
            .reserve_slot(&SALON, booking("17:00", "18:00", "Bea"))
            .await
            .unwrap();
        store
            .update_appointment_status(&SALON, late.id, AppointmentStatus::Completed)
            .await
            .unwrap();

        let newest_first = store
            .list_appointments(&SALON, &AppointmentFilter::default())
            .await
            .unwrap();
        assert_eq!(newest_first[0].id, late.id);

        let pending = store
            .list_appointments(
                &SALON,
                &AppointmentFilter {
                    statuses: vec![AppointmentStatus::Pending, AppointmentStatus::Confirmed],
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, early.id);

        let out_of_range = store
            .list_appointments(
                &SALON,
                &AppointmentFilter {
                    date_from: day().succ_opt(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(out_of_range.is_empty());
    }

    #[tokio::test]
    async fn working_hours_upsert_replaces_row() {
        let (_dir, store) = test_store(1).await;
        let mut monday = WorkingHours {
            professional_id: 5,
            day_of_week: DayOfWeek::Monday,
            morning_start: Some("09:00".into()),
            morning_end: Some("13:00".into()),
            afternoon_start: Some("14:00".into()),
            afternoon_end: Some("18:00".into()),
            active: true,
        };
        store.upsert_working_hours(&SALON, monday.clone()).await.unwrap();
        store
            .upsert_working_hours(
                &SALON,
                WorkingHours {
                    day_of_week: DayOfWeek::Sunday,
                    active: false,
                    ..monday.clone()
                },
            )
            .await
            .unwrap();

        monday.afternoon_start = None;
        monday.afternoon_end = None;
        store.upsert_working_hours(&SALON, monday.clone()).await.unwrap();

        let found = store
            .find_working_hours(&SALON, 5, DayOfWeek::Monday)
            .await
            .unwrap();
        assert_eq!(found, Some(monday));

        let all = store.list_working_hours(&SALON, 5, false).await.unwrap();
        assert_eq!(
            all.iter().map(|h| h.day_of_week).collect::<Vec<_>>(),
            vec![DayOfWeek::Monday, DayOfWeek::Sunday]
        );
        let active = store.list_working_hours(&SALON, 5, true).await.unwrap();
        assert_eq!(active.len(), 1);
        assert!(store
            .list_working_hours(&OTHER_SALON, 5, false)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn windows_create_list_delete() {
        let (_dir, store) = test_store(1).await;
        let window = |start: &str, end: &str| NewScheduleWindow {
            professional_id: 5,
            date: day(),
            start: start.to_string(),
            end: end.to_string(),
            reason: Some("dentist".to_string()),
        };

        let late = store
            .create_window(&SALON, WindowKind::Blocked, window("16:00", "17:00"))
            .await
            .unwrap();
        store
            .create_window(&SALON, WindowKind::Blocked, window("10:00", "11:00"))
            .await
            .unwrap();
        store
            .create_window(&SALON, WindowKind::Overtime, window("19:00", "21:00"))
            .await
            .unwrap();

        let blocked = store
            .list_windows(&SALON, WindowKind::Blocked, 5, day())
            .await
            .unwrap();
        assert_eq!(
            blocked.iter().map(|w| w.start.as_str()).collect::<Vec<_>>(),
            vec!["10:00", "16:00"]
        );
        assert_eq!(blocked[0].reason.as_deref(), Some("dentist"));

        assert!(!store
            .delete_window(&OTHER_SALON, WindowKind::Blocked, late.id)
            .await
            .unwrap());
        assert!(store
            .delete_window(&SALON, WindowKind::Blocked, late.id)
            .await
            .unwrap());
        assert!(!store
            .delete_window(&SALON, WindowKind::Blocked, late.id)
            .await
            .unwrap());

        let overtime = store
            .list_windows(&SALON, WindowKind::Overtime, 5, day())
            .await
            .unwrap();
        assert_eq!(overtime.len(), 1);
    }

    #[tokio::test]
    async fn credentials_are_replaced_and_scoped() {
        let (_dir, store) = test_store(1).await;
        assert!(store.find_credentials(&SALON, 5).await.unwrap().is_none());

        for token in ["1//first", "1//second"] {
            store
                .save_credentials(
                    &SALON,
                    CalendarCredentials {
                        professional_id: 5,
                        refresh_token: token.to_string(),
                    },
                )
                .await
                .unwrap();
        }

        let creds = store.find_credentials(&SALON, 5).await.unwrap().unwrap();
        assert_eq!(creds.refresh_token, "1//second");
        assert!(store.find_credentials(&OTHER_SALON, 5).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn health_check_on_live_pool() {
        let (_dir, store) = test_store(1).await;
        assert!(store.db_client().is_healthy().await);
    }
}
