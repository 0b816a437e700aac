use folio_client::ApiClient;

use super::http::{delete_appointment, get_appointment, list_appointments, set_appointment_status};
use crate::cli_args::{AppointmentArgs, AppointmentCommand};
use crate::modules::system::print_payload;

pub(crate) async fn handle_appointment(
    args: AppointmentArgs,
    api: &ApiClient,
) -> anyhow::Result<()> {
    match args.command {
        AppointmentCommand::List(args) => {
            let appointments = list_appointments(api, args.status).await?;
            for item in appointments {
                println!(
                    "{}  [{:?}]  {}  {} <{}>",
                    item.id,
                    item.status,
                    item.scheduled_at.format("%Y-%m-%d %H:%M"),
                    item.client_name,
                    item.client_email
                );
            }
        }
        AppointmentCommand::Get(args) => {
            let appointment = get_appointment(api, &args.id).await?;
            print_payload(&appointment)?;
        }
        AppointmentCommand::Confirm(args) => {
            let item = set_appointment_status(api, &args.id, "confirmed").await?;
            println!("Appointment with {} is now {:?}", item.client_name, item.status);
        }
        AppointmentCommand::Cancel(args) => {
            let item = set_appointment_status(api, &args.id, "cancelled").await?;
            println!("Appointment with {} is now {:?}", item.client_name, item.status);
        }
        AppointmentCommand::Delete(args) => {
            delete_appointment(api, &args.id).await?;
            println!("Appointment deleted");
        }
    }
    Ok(())
}
