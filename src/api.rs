use std::error::Error;
use std::str::FromStr;

tonic::include_proto!("api");

#[allow(clippy::from_over_into)]
impl Into<String> for IntegrationKind {
    fn into(self) -> String {
        match self {
            IntegrationKind::Http => "HTTP",
            IntegrationKind::InfluxDb => "INFLUX_DB",
            IntegrationKind::ThingsBoard => "THINGS_BOARD",
            IntegrationKind::MyDevices => "MY_DEVICES",
            IntegrationKind::LoraCloud => "LORA_CLOUD",
            IntegrationKind::GcpPubSub => "GCP_PUB_SUB",
            IntegrationKind::AwsSns => "AWS_SNS",
            IntegrationKind::AzureServiceBus => "AZURE_SERVICE_BUS",
            IntegrationKind::PilotThings => "PILOT_THINGS",
            IntegrationKind::MqttGlobal => "MQTT_GLOBAL",
            IntegrationKind::Ifttt => "IFTTT",
        }
        .to_string()
    }
}

impl FromStr for IntegrationKind {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Box<dyn Error>> {
        Ok(match s {
            "HTTP" => IntegrationKind::Http,
            "INFLUX_DB" => IntegrationKind::InfluxDb,
            "THINGS_BOARD" => IntegrationKind::ThingsBoard,
            "MY_DEVICES" => IntegrationKind::MyDevices,
            "LORA_CLOUD" => IntegrationKind::LoraCloud,
            "GCP_PUB_SUB" => IntegrationKind::GcpPubSub,
            "AWS_SNS" => IntegrationKind::AwsSns,
            "AZURE_SERVICE_BUS" => IntegrationKind::AzureServiceBus,
            "PILOT_THINGS" => IntegrationKind::PilotThings,
            "MQTT_GLOBAL" => IntegrationKind::MqttGlobal,
            "IFTTT" => IntegrationKind::Ifttt,
            _ => {
                return Err("invalid integration kind".into());
            }
        })
    }
}

#[allow(clippy::from_over_into)]
impl Into<String> for Encoding {
    fn into(self) -> String {
        match self {
            Encoding::Json => "JSON",
            Encoding::Protobuf => "PROTOBUF",
        }
        .to_string()
    }
}

impl FromStr for Encoding {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Box<dyn Error>> {
        Ok(match s {
            "JSON" => Encoding::Json,
            "PROTOBUF" => Encoding::Protobuf,
            _ => {
                return Err("invalid encoding".into());
            }
        })
    }
}

#[allow(clippy::from_over_into)]
impl Into<String> for MulticastGroupType {
    fn into(self) -> String {
        match self {
            MulticastGroupType::ClassC => "CLASS_C",
            MulticastGroupType::ClassB => "CLASS_B",
        }
        .to_string()
    }
}

impl FromStr for MulticastGroupType {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Box<dyn Error>> {
        Ok(match s {
            "CLASS_C" => MulticastGroupType::ClassC,
            "CLASS_B" => MulticastGroupType::ClassB,
            _ => {
                return Err("invalid multicast group type".into());
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integration_kind_names_round_trip() {
        for kind in [
            IntegrationKind::Http,
            IntegrationKind::InfluxDb,
            IntegrationKind::ThingsBoard,
            IntegrationKind::MyDevices,
            IntegrationKind::LoraCloud,
            IntegrationKind::GcpPubSub,
            IntegrationKind::AwsSns,
            IntegrationKind::AzureServiceBus,
            IntegrationKind::PilotThings,
            IntegrationKind::MqttGlobal,
            IntegrationKind::Ifttt,
        ] {
            let name: String = kind.into();
            assert_eq!(kind, IntegrationKind::from_str(&name).unwrap());
        }
    }

    #[test]
    fn multicast_group_type_names_round_trip() {
        for group_type in
            [MulticastGroupType::ClassC, MulticastGroupType::ClassB]
        {
            let name: String = group_type.into();
            assert_eq!(
                group_type,
                MulticastGroupType::from_str(&name).unwrap()
            );
        }
        assert!(MulticastGroupType::from_str("CLASS_A").is_err());
    }

    #[test]
    fn encoding_names_round_trip() {
        let name: String = Encoding::Protobuf.into();
        assert_eq!(Encoding::Protobuf, Encoding::from_str(&name).unwrap());
        assert!(Encoding::from_str("XML").is_err());
    }
}
