fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Use the vendored protoc so builds do not depend on a system
    // install.
    std::env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);

    println!("cargo:rerun-if-changed=proto");

    tonic_prost_build::configure()
        .build_client(true)
        .build_server(false)
        .compile_protos(
            &[
                std::path::PathBuf::from("proto/common/common.proto"),
                std::path::PathBuf::from("proto/api/application.proto"),
                std::path::PathBuf::from("proto/api/multicast_group.proto"),
                std::path::PathBuf::from("proto/stream/backend_interfaces.proto"),
            ],
            &[
                std::path::PathBuf::from("proto"),
                protoc_bin_vendored::include_path()?,
            ],
        )?;

    Ok(())
}
