tonic::include_proto!("stream");
