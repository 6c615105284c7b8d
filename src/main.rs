use std::collections::HashMap;
use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use clap::{Parser, Subcommand};
use tracing::{error, Level};

use devhub_api::api::{
    Application, Encoding, HttpIntegration, MulticastGroup,
    MulticastGroupQueueItem, MulticastGroupType,
};
use devhub_api::common::Region;
use devhub_api::{application, multicast_group};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// API token used to authorize requests
    #[arg(short, long, env = "DEVHUB_API_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an application
    CreateApplication {
        /// Tenant ID (UUID)
        tenant_id: String,

        /// Application name
        name: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// List the applications of a tenant
    ListApplications {
        /// Tenant ID (UUID)
        tenant_id: String,

        #[arg(long, default_value_t = 20)]
        limit: u32,

        #[arg(long, default_value_t = 0)]
        offset: u32,

        /// Search on application name
        #[arg(long, default_value = "")]
        search: String,
    },

    /// Show one application
    GetApplication {
        /// Application ID (UUID)
        id: String,
    },

    /// Delete an application
    DeleteApplication {
        /// Application ID (UUID)
        id: String,
    },

    /// List the configured integrations of an application
    ListIntegrations {
        /// Application ID (UUID)
        application_id: String,
    },

    /// Configure the HTTP integration of an application
    CreateHttpIntegration {
        /// Application ID (UUID)
        application_id: String,

        /// Event endpoint URL
        event_endpoint_url: String,

        /// Payload encoding (JSON or PROTOBUF)
        #[arg(long, default_value = "JSON")]
        encoding: String,

        /// Header to set on event requests (name=value, repeatable)
        #[arg(long = "header")]
        headers: Vec<String>,
    },

    /// Show the HTTP integration of an application
    GetHttpIntegration {
        /// Application ID (UUID)
        application_id: String,
    },

    /// Delete the HTTP integration of an application
    DeleteHttpIntegration {
        /// Application ID (UUID)
        application_id: String,
    },

    /// Generate an MQTT integration client certificate
    MqttCertificate {
        /// Application ID (UUID)
        application_id: String,
    },

    /// Create a multicast group
    CreateMulticastGroup {
        /// Application ID (UUID)
        application_id: String,

        /// Multicast group name
        name: String,

        /// Region name, e.g. EU868
        #[arg(long, default_value = "EU868")]
        region: String,

        /// Multicast address (HEX encoded DevAddr)
        #[arg(long)]
        mc_addr: String,

        /// Multicast network session key (HEX encoded AES128 key)
        #[arg(long)]
        mc_nwk_s_key: String,

        /// Multicast application session key (HEX encoded AES128 key)
        #[arg(long)]
        mc_app_s_key: String,

        /// Initial frame-counter
        #[arg(long, default_value_t = 0)]
        f_cnt: u32,

        /// Group type (CLASS_C or CLASS_B)
        #[arg(long, default_value = "CLASS_C")]
        group_type: String,

        /// Data-rate
        #[arg(long, default_value_t = 0)]
        dr: u32,

        /// Frequency (Hz)
        #[arg(long, default_value_t = 0)]
        frequency: u32,
    },

    /// List the multicast groups of an application
    ListMulticastGroups {
        /// Application ID (UUID)
        application_id: String,

        #[arg(long, default_value_t = 20)]
        limit: u32,

        #[arg(long, default_value_t = 0)]
        offset: u32,

        /// Search on multicast group name
        #[arg(long, default_value = "")]
        search: String,
    },

    /// Show one multicast group
    GetMulticastGroup {
        /// Multicast group ID (UUID)
        id: String,
    },

    /// Delete a multicast group
    DeleteMulticastGroup {
        /// Multicast group ID (UUID)
        id: String,
    },

    /// Add a device to a multicast group
    AddDevice {
        /// Multicast group ID (UUID)
        multicast_group_id: String,

        /// Device EUI (HEX encoded)
        dev_eui: String,
    },

    /// Remove a device from a multicast group
    RemoveDevice {
        /// Multicast group ID (UUID)
        multicast_group_id: String,

        /// Device EUI (HEX encoded)
        dev_eui: String,
    },

    /// Add a gateway to a multicast group
    AddGateway {
        /// Multicast group ID (UUID)
        multicast_group_id: String,

        /// Gateway ID (HEX encoded)
        gateway_id: String,
    },

    /// Remove a gateway from a multicast group
    RemoveGateway {
        /// Multicast group ID (UUID)
        multicast_group_id: String,

        /// Gateway ID (HEX encoded)
        gateway_id: String,
    },

    /// Enqueue a downlink payload on a multicast group queue
    Enqueue {
        /// Multicast group ID (UUID)
        multicast_group_id: String,

        /// FPort (must be > 0)
        #[arg(long, default_value_t = 1)]
        f_port: u32,

        /// Payload (base64 encoded)
        data: String,
    },

    /// List the queue of a multicast group
    ListQueue {
        /// Multicast group ID (UUID)
        multicast_group_id: String,
    },

    /// Flush the queue of a multicast group
    FlushQueue {
        /// Multicast group ID (UUID)
        multicast_group_id: String,
    },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Set up logging.

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Unable to set global default subscriber");

    if let Err(e) = run(args).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let token = args.token.as_deref();

    match args.command {
        Command::CreateApplication {
            tenant_id,
            name,
            description,
        } => {
            let app = Application {
                name,
                description,
                tenant_id,
                ..Default::default()
            };

            let id = application::create(app, token).await?;
            println!("{}", id);
        }

        Command::ListApplications {
            tenant_id,
            limit,
            offset,
            search,
        } => {
            let resp =
                application::list(tenant_id, limit, offset, search, token)
                    .await?;

            println!("{} application(s)", resp.total_count);
            for app in resp.result {
                println!("{}  {}  {}", app.id, app.name, app.description);
            }
        }

        Command::GetApplication { id } => {
            let resp = application::get(id, token).await?;

            if let Some(app) = resp.application {
                println!("{:#?}", app);
            }
            if !resp.measurement_keys.is_empty() {
                println!("measurement keys: {:?}", resp.measurement_keys);
            }
        }

        Command::DeleteApplication { id } => {
            application::delete(id, token).await?;
        }

        Command::ListIntegrations { application_id } => {
            let resp =
                application::list_integrations(application_id, token).await?;

            println!("{} integration(s)", resp.total_count);
            for item in resp.result {
                let kind: String = item.kind().into();
                println!("{}", kind);
            }
        }

        Command::CreateHttpIntegration {
            application_id,
            event_endpoint_url,
            encoding,
            headers,
        } => {
            let mut header_map = HashMap::new();
            for header in headers {
                match header.split_once('=') {
                    Some((name, value)) => {
                        header_map
                            .insert(name.to_string(), value.to_string());
                    }
                    None => {
                        return Err(format!(
                            "invalid header \"{}\", expected name=value",
                            header
                        )
                        .into());
                    }
                }
            }

            let integration = HttpIntegration {
                application_id,
                headers: header_map,
                encoding: Encoding::from_str(&encoding)? as i32,
                event_endpoint_url,
            };

            application::create_http_integration(integration, token).await?;
        }

        Command::GetHttpIntegration { application_id } => {
            if let Some(integration) =
                application::get_http_integration(application_id, token)
                    .await?
            {
                println!("{:#?}", integration);
            }
        }

        Command::DeleteHttpIntegration { application_id } => {
            application::delete_http_integration(application_id, token)
                .await?;
        }

        Command::MqttCertificate { application_id } => {
            let resp = application::generate_mqtt_client_certificate(
                application_id,
                token,
            )
            .await?;

            println!("{}", resp.ca_cert);
            println!("{}", resp.tls_cert);
            println!("{}", resp.tls_key);
        }

        Command::CreateMulticastGroup {
            application_id,
            name,
            region,
            mc_addr,
            mc_nwk_s_key,
            mc_app_s_key,
            f_cnt,
            group_type,
            dr,
            frequency,
        } => {
            let group = MulticastGroup {
                name,
                application_id,
                region: Region::from_str(&region)? as i32,
                mc_addr,
                mc_nwk_s_key,
                mc_app_s_key,
                f_cnt,
                group_type: MulticastGroupType::from_str(&group_type)? as i32,
                dr,
                frequency,
                ..Default::default()
            };

            let id = multicast_group::create(group, token).await?;
            println!("{}", id);
        }

        Command::ListMulticastGroups {
            application_id,
            limit,
            offset,
            search,
        } => {
            let resp = multicast_group::list(
                application_id,
                limit,
                offset,
                search,
                token,
            )
            .await?;

            println!("{} multicast group(s)", resp.total_count);
            for group in resp.result {
                let region: String = group.region().into();
                println!("{}  {}  {}", group.id, group.name, region);
            }
        }

        Command::GetMulticastGroup { id } => {
            let resp = multicast_group::get(id, token).await?;

            if let Some(group) = resp.multicast_group {
                println!("{:#?}", group);
            }
        }

        Command::DeleteMulticastGroup { id } => {
            multicast_group::delete(id, token).await?;
        }

        Command::AddDevice {
            multicast_group_id,
            dev_eui,
        } => {
            multicast_group::add_device(multicast_group_id, dev_eui, token)
                .await?;
        }

        Command::RemoveDevice {
            multicast_group_id,
            dev_eui,
        } => {
            multicast_group::remove_device(multicast_group_id, dev_eui, token)
                .await?;
        }

        Command::AddGateway {
            multicast_group_id,
            gateway_id,
        } => {
            multicast_group::add_gateway(
                multicast_group_id,
                gateway_id,
                token,
            )
            .await?;
        }

        Command::RemoveGateway {
            multicast_group_id,
            gateway_id,
        } => {
            multicast_group::remove_gateway(
                multicast_group_id,
                gateway_id,
                token,
            )
            .await?;
        }

        Command::Enqueue {
            multicast_group_id,
            f_port,
            data,
        } => {
            let item = MulticastGroupQueueItem {
                multicast_group_id,
                f_port,
                data: BASE64.decode(data)?,
                ..Default::default()
            };

            let f_cnt = multicast_group::enqueue(item, token).await?;
            println!("enqueued with f_cnt {}", f_cnt);
        }

        Command::ListQueue { multicast_group_id } => {
            for item in
                multicast_group::list_queue(multicast_group_id, token).await?
            {
                println!(
                    "f_cnt {}  f_port {}  {}",
                    item.f_cnt,
                    item.f_port,
                    BASE64.encode(&item.data)
                );
            }
        }

        Command::FlushQueue { multicast_group_id } => {
            multicast_group::flush_queue(multicast_group_id, token).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_subcommands_parse() {
        let args = Args::try_parse_from([
            "devhub-api",
            "create-application",
            "52f14cd4-c6f1-4fbd-8f87-4025e1d49242",
            "shop-sensors",
            "--description",
            "Shop floor sensors",
        ])
        .unwrap();

        assert!(matches!(
            args.command,
            Command::CreateApplication { ref name, .. } if name == "shop-sensors"
        ));

        let args = Args::try_parse_from([
            "devhub-api",
            "delete-application",
            "8a1fde12-4ff5-4f5c-b25a-8d4416f8b1b2",
        ])
        .unwrap();

        assert!(matches!(args.command, Command::DeleteApplication { .. }));
    }

    #[test]
    fn http_integration_subcommand_parses_headers() {
        let args = Args::try_parse_from([
            "devhub-api",
            "create-http-integration",
            "17c77dcc-39f6-42be-93d9-82a4b57583e9",
            "https://example.com/events",
            "--encoding",
            "PROTOBUF",
            "--header",
            "Authorization=Token xyz",
            "--header",
            "X-Deployment=staging",
        ])
        .unwrap();

        match args.command {
            Command::CreateHttpIntegration {
                encoding, headers, ..
            } => {
                assert_eq!("PROTOBUF", encoding);
                assert_eq!(2, headers.len());
            }
            _ => panic!("unexpected subcommand"),
        }
    }

    #[test]
    fn multicast_group_subcommands_parse() {
        let args = Args::try_parse_from([
            "devhub-api",
            "create-multicast-group",
            "17c77dcc-39f6-42be-93d9-82a4b57583e9",
            "firmware-rollout",
            "--region",
            "AU915",
            "--mc-addr",
            "01020304",
            "--mc-nwk-s-key",
            "000102030405060708090a0b0c0d0e0f",
            "--mc-app-s-key",
            "0f0e0d0c0b0a09080706050403020100",
            "--group-type",
            "CLASS_B",
        ])
        .unwrap();

        match args.command {
            Command::CreateMulticastGroup {
                region, group_type, ..
            } => {
                assert_eq!(
                    Region::Au915,
                    Region::from_str(&region).unwrap()
                );
                assert_eq!(
                    MulticastGroupType::ClassB,
                    MulticastGroupType::from_str(&group_type).unwrap()
                );
            }
            _ => panic!("unexpected subcommand"),
        }

        let args = Args::try_parse_from([
            "devhub-api",
            "add-device",
            "7b25bebb-edea-4831-b482-9f4a386d6a10",
            "0102030405060708",
        ])
        .unwrap();

        assert!(matches!(
            args.command,
            Command::AddDevice { ref dev_eui, .. } if dev_eui == "0102030405060708"
        ));

        let args = Args::try_parse_from([
            "devhub-api",
            "remove-gateway",
            "7b25bebb-edea-4831-b482-9f4a386d6a10",
            "0807060504030201",
        ])
        .unwrap();

        assert!(matches!(args.command, Command::RemoveGateway { .. }));
    }
}
