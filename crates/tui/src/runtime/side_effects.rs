//! Async side effect handlers for TUI actions.
//!
//! Responsibilities:
//! - Handle the API calls triggered by user actions.
//! - Spawn a tokio task per call so the UI never blocks.
//! - Send results back via the action channel for state updates.
//!
//! Does NOT handle:
//! - Direct application state modification (sends actions to do that).
//! - UI rendering or terminal management.
//!
//! Invariants:
//! - One trigger, one HTTP request. No retries, no deduplication, no
//!   in-flight coalescing: firing the same fetch twice spawns two
//!   independent tasks and the later completion's assignment wins.
//! - Mutations that change backend state enqueue a follow-up fetch
//!   (re-fetch after rent/return/edit/bulk operations); single and
//!   batch removals instead prune locally in the store.

use fleet_client::FleetClient;
use std::sync::Arc;
use tokio::sync::mpsc::Sender;

use crate::action::Action;

/// Shared client for async tasks.
pub type SharedClient = Arc<FleetClient>;

/// Handle side effects (async API calls) for actions.
///
/// Spawns background tasks for API operations and sends completion
/// actions back through the channel. Actions without side effects are
/// ignored.
pub async fn handle_side_effects(action: Action, client: SharedClient, tx: Sender<Action>) {
    match action {
        Action::LoadVehicles => {
            tokio::spawn(async move {
                let result = client.list_all().await.map_err(|e| e.to_string());
                let _ = tx.send(Action::VehiclesLoaded(result)).await;
            });
        }
        Action::LoadAvailable => {
            tokio::spawn(async move {
                let result = client.list_available().await.map_err(|e| e.to_string());
                let _ = tx.send(Action::AvailableLoaded(result)).await;
            });
        }
        Action::LoadVehiclesByBranch(branch) => {
            tokio::spawn(async move {
                let result = client
                    .fetch_by_branch(&branch)
                    .await
                    .map_err(|e| e.to_string());
                let _ = tx.send(Action::VehiclesLoaded(result)).await;
            });
        }
        Action::LoadVehiclesByCategory(category) => {
            tokio::spawn(async move {
                let result = client
                    .list_by_category(&category)
                    .await
                    .map_err(|e| e.to_string());
                let _ = tx.send(Action::VehiclesLoaded(result)).await;
            });
        }
        Action::LoadVehicleByReg(reg) => {
            tokio::spawn(async move {
                let result = client
                    .show_by_registration(&reg)
                    .await
                    .map(Box::new)
                    .map_err(|e| e.to_string());
                let _ = tx.send(Action::VehicleLoaded(result)).await;
            });
        }
        Action::LoadCategories => {
            tokio::spawn(async move {
                let result = client.category_list().await.map_err(|e| e.to_string());
                let _ = tx.send(Action::CategoriesLoaded(result)).await;
            });
        }
        Action::LoadBranches => {
            tokio::spawn(async move {
                let result = client.branch_list().await.map_err(|e| e.to_string());
                let _ = tx.send(Action::BranchesLoaded(result)).await;
            });
        }
        Action::LoadStatuses => {
            tokio::spawn(async move {
                let result = client.status_list().await.map_err(|e| e.to_string());
                let _ = tx.send(Action::StatusesLoaded(result)).await;
            });
        }
        Action::RunSearch(filters) => {
            tokio::spawn(async move {
                let result = client.search(&filters).await.map_err(|e| e.to_string());
                let _ = tx.send(Action::SearchCompleted(result)).await;
            });
        }
        Action::RunGlobalSearch(filters) => {
            tokio::spawn(async move {
                let result = client.search(&filters).await.map_err(|e| e.to_string());
                let _ = tx.send(Action::GlobalSearchCompleted(result)).await;
            });
        }
        Action::RentVehicle(reg) => {
            tokio::spawn(async move {
                match client.rent_vehicle(&reg).await {
                    Ok(_) => {
                        let _ = tx.send(Action::VehicleRented(Ok(reg.clone()))).await;
                        // Refresh the open details view with the new status
                        let _ = tx.send(Action::LoadVehicleByReg(reg)).await;
                    }
                    Err(e) => {
                        let _ = tx.send(Action::VehicleRented(Err(e.to_string()))).await;
                    }
                }
            });
        }
        Action::ReturnVehicle(reg) => {
            tokio::spawn(async move {
                match client.return_vehicle(&reg).await {
                    Ok(_) => {
                        let _ = tx.send(Action::VehicleReturned(Ok(reg.clone()))).await;
                        let _ = tx.send(Action::LoadVehicleByReg(reg)).await;
                    }
                    Err(e) => {
                        let _ = tx.send(Action::VehicleReturned(Err(e.to_string()))).await;
                    }
                }
            });
        }
        Action::AddVehicle(vehicle) => {
            tokio::spawn(async move {
                let result = client
                    .add_vehicle(&vehicle)
                    .await
                    .map(Box::new)
                    .map_err(|e| e.to_string());
                let _ = tx.send(Action::VehicleAdded(result)).await;
            });
        }
        Action::RemoveVehicle(id) => {
            tokio::spawn(async move {
                let result = client
                    .remove_vehicle(id)
                    .await
                    .map(|_| id)
                    .map_err(|e| e.to_string());
                let _ = tx.send(Action::VehicleRemoved(result)).await;
            });
        }
        Action::BatchRemoveVehicles(ids) => {
            tokio::spawn(async move {
                let result = client
                    .batch_remove(&ids)
                    .await
                    .map(|_| ids)
                    .map_err(|e| e.to_string());
                let _ = tx.send(Action::VehiclesBatchRemoved(result)).await;
            });
        }
        Action::EditVehicle(update) => {
            tokio::spawn(async move {
                let reg = update.vrm.clone();
                match client.edit_vehicle(&update).await {
                    Ok(_) => {
                        let _ = tx.send(Action::VehicleEdited(Ok(reg.clone()))).await;
                        let _ = tx.send(Action::LoadVehicleByReg(reg)).await;
                    }
                    Err(e) => {
                        let _ = tx.send(Action::VehicleEdited(Err(e.to_string()))).await;
                    }
                }
            });
        }
        Action::BulkAddVehicles(vehicles) => {
            tokio::spawn(async move {
                let count = vehicles.len();
                match client.bulk_add(&vehicles).await {
                    Ok(_) => {
                        let _ = tx.send(Action::VehiclesBulkAdded(Ok(count))).await;
                        let _ = tx.send(Action::LoadVehicles).await;
                    }
                    Err(e) => {
                        let _ = tx.send(Action::VehiclesBulkAdded(Err(e.to_string()))).await;
                    }
                }
            });
        }
        Action::BatchEditVehicles(updates) => {
            tokio::spawn(async move {
                let count = updates.len();
                match client.batch_edit(&updates).await {
                    Ok(_) => {
                        let _ = tx.send(Action::VehiclesBatchEdited(Ok(count))).await;
                        let _ = tx.send(Action::LoadVehicles).await;
                    }
                    Err(e) => {
                        let _ = tx
                            .send(Action::VehiclesBatchEdited(Err(e.to_string())))
                            .await;
                    }
                }
            });
        }
        Action::LoadFleetInsights => {
            tokio::spawn(async move {
                let result = client.fleet_insights().await.map_err(|e| e.to_string());
                let _ = tx.send(Action::FleetInsightsLoaded(result)).await;
            });
        }
        Action::LoadStatusByBranch(branch) => {
            tokio::spawn(async move {
                let result = client
                    .status_by_branch(&branch)
                    .await
                    .map_err(|e| e.to_string());
                let _ = tx.send(Action::StatusByBranchLoaded(result)).await;
            });
        }
        Action::LoadCategoryByBranch(branch) => {
            tokio::spawn(async move {
                let result = client
                    .category_by_branch(&branch)
                    .await
                    .map_err(|e| e.to_string());
                let _ = tx.send(Action::CategoryByBranchLoaded(result)).await;
            });
        }
        Action::LoadUtilisationByBranch(branch) => {
            tokio::spawn(async move {
                let result = client
                    .rental_utilisation_by_branch(&branch)
                    .await
                    .map_err(|e| e.to_string());
                let _ = tx.send(Action::UtilisationLoaded(result)).await;
            });
        }
        Action::LoadRentedByCategory(branch) => {
            tokio::spawn(async move {
                let result = client
                    .rented_by_category(&branch)
                    .await
                    .map_err(|e| e.to_string());
                let _ = tx.send(Action::RentedByCategoryLoaded(result)).await;
            });
        }
        Action::LoadIssuesPercentage(branch) => {
            tokio::spawn(async move {
                let result = client
                    .issues_percentage(&branch)
                    .await
                    .map_err(|e| e.to_string());
                let _ = tx.send(Action::IssuesPercentageLoaded(result)).await;
            });
        }

        // Everything else is pure state and handled in App::update.
        _ => {}
    }
}
