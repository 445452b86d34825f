//! Diesel table definitions for the CI platform.
//!
//! Scalar columns are nullable; the record layer stores the zero value of a
//! column as NULL. Sequences are text or bigint arrays, JSON documents are
//! jsonb, and compressed payloads are bytea.

diesel::table! {
    builds (id) {
        id -> Int8,
        repo_id -> Nullable<Int8>,
        pipeline_id -> Nullable<Int8>,
        number -> Nullable<Int4>,
        parent -> Nullable<Int4>,
        event -> Nullable<Varchar>,
        event_action -> Nullable<Varchar>,
        status -> Nullable<Varchar>,
        error -> Nullable<Varchar>,
        enqueued -> Nullable<Int8>,
        created -> Nullable<Int8>,
        started -> Nullable<Int8>,
        finished -> Nullable<Int8>,
        deploy -> Nullable<Varchar>,
        deploy_number -> Nullable<Int8>,
        clone -> Nullable<Varchar>,
        source -> Nullable<Varchar>,
        title -> Nullable<Varchar>,
        message -> Nullable<Varchar>,
        commit -> Nullable<Varchar>,
        sender -> Nullable<Varchar>,
        sender_scm_id -> Nullable<Varchar>,
        author -> Nullable<Varchar>,
        email -> Nullable<Varchar>,
        link -> Nullable<Varchar>,
        branch -> Nullable<Varchar>,
        #[sql_name = "ref"]
        reference -> Nullable<Varchar>,
        base_ref -> Nullable<Varchar>,
        head_ref -> Nullable<Varchar>,
        host -> Nullable<Varchar>,
        runtime -> Nullable<Varchar>,
        distribution -> Nullable<Varchar>,
        approved_at -> Nullable<Int8>,
        approved_by -> Nullable<Varchar>,
    }
}

diesel::table! {
    build_executables (id) {
        id -> Int8,
        build_id -> Nullable<Int8>,
        data -> Nullable<Bytea>,
    }
}

diesel::table! {
    build_itineraries (id) {
        id -> Int8,
        build_id -> Nullable<Int8>,
        data -> Nullable<Bytea>,
    }
}

diesel::table! {
    compiled (id) {
        id -> Int8,
        build_id -> Nullable<Int8>,
        pipeline_id -> Nullable<Int8>,
        data -> Nullable<Bytea>,
    }
}

diesel::table! {
    dashboards (id) {
        id -> Uuid,
        name -> Nullable<Varchar>,
        created_at -> Nullable<Int8>,
        created_by -> Nullable<Varchar>,
        updated_at -> Nullable<Int8>,
        updated_by -> Nullable<Varchar>,
        admins -> Array<Text>,
        repos -> Nullable<Jsonb>,
    }
}

diesel::table! {
    deployments (id) {
        id -> Int8,
        repo_id -> Nullable<Int8>,
        number -> Nullable<Int8>,
        url -> Nullable<Varchar>,
        commit -> Nullable<Varchar>,
        #[sql_name = "ref"]
        reference -> Nullable<Varchar>,
        task -> Nullable<Varchar>,
        target -> Nullable<Varchar>,
        description -> Nullable<Varchar>,
        payload -> Nullable<Jsonb>,
        created_at -> Nullable<Int8>,
        created_by -> Nullable<Varchar>,
        builds -> Array<Int8>,
    }
}

diesel::table! {
    hooks (id) {
        id -> Int8,
        repo_id -> Nullable<Int8>,
        build_id -> Nullable<Int8>,
        number -> Nullable<Int4>,
        source_id -> Nullable<Varchar>,
        created -> Nullable<Int8>,
        host -> Nullable<Varchar>,
        event -> Nullable<Varchar>,
        event_action -> Nullable<Varchar>,
        branch -> Nullable<Varchar>,
        error -> Nullable<Varchar>,
        status -> Nullable<Varchar>,
        link -> Nullable<Varchar>,
        webhook_id -> Nullable<Int8>,
    }
}

diesel::table! {
    inits (id) {
        id -> Int8,
        repo_id -> Nullable<Int8>,
        build_id -> Nullable<Int8>,
        number -> Nullable<Int4>,
        reporter -> Nullable<Varchar>,
        name -> Nullable<Varchar>,
        mimetype -> Nullable<Varchar>,
    }
}

diesel::table! {
    init_steps (id) {
        id -> Int8,
        repo_id -> Nullable<Int8>,
        build_id -> Nullable<Int8>,
        init_id -> Nullable<Int8>,
        number -> Nullable<Int4>,
        reporter -> Nullable<Varchar>,
        name -> Nullable<Varchar>,
        status -> Nullable<Varchar>,
        error -> Nullable<Varchar>,
        created -> Nullable<Int8>,
        started -> Nullable<Int8>,
        finished -> Nullable<Int8>,
    }
}

diesel::table! {
    logs (id) {
        id -> Int8,
        build_id -> Nullable<Int8>,
        repo_id -> Nullable<Int8>,
        service_id -> Nullable<Int8>,
        step_id -> Nullable<Int8>,
        init_id -> Nullable<Int8>,
        data -> Nullable<Bytea>,
    }
}

diesel::table! {
    pipelines (id) {
        id -> Int8,
        repo_id -> Nullable<Int8>,
        commit -> Nullable<Varchar>,
        flavor -> Nullable<Varchar>,
        platform -> Nullable<Varchar>,
        #[sql_name = "ref"]
        reference -> Nullable<Varchar>,
        #[sql_name = "type"]
        kind -> Nullable<Varchar>,
        version -> Nullable<Varchar>,
        external_secrets -> Nullable<Bool>,
        internal_secrets -> Nullable<Bool>,
        services -> Nullable<Bool>,
        stages -> Nullable<Bool>,
        steps -> Nullable<Bool>,
        templates -> Nullable<Bool>,
        data -> Nullable<Bytea>,
    }
}

diesel::table! {
    repos (id) {
        id -> Int8,
        user_id -> Nullable<Int8>,
        hash -> Nullable<Varchar>,
        org -> Nullable<Varchar>,
        name -> Nullable<Varchar>,
        full_name -> Nullable<Varchar>,
        link -> Nullable<Varchar>,
        clone -> Nullable<Varchar>,
        branch -> Nullable<Varchar>,
        topics -> Array<Text>,
        build_limit -> Nullable<Int8>,
        timeout -> Nullable<Int8>,
        counter -> Nullable<Int4>,
        visibility -> Nullable<Varchar>,
        private -> Nullable<Bool>,
        trusted -> Nullable<Bool>,
        active -> Nullable<Bool>,
        allow_pull -> Nullable<Bool>,
        allow_push -> Nullable<Bool>,
        allow_deploy -> Nullable<Bool>,
        allow_tag -> Nullable<Bool>,
        allow_comment -> Nullable<Bool>,
        pipeline_type -> Nullable<Varchar>,
        previous_name -> Nullable<Varchar>,
        approve_build -> Nullable<Varchar>,
    }
}

diesel::table! {
    schedules (id) {
        id -> Int8,
        repo_id -> Nullable<Int8>,
        active -> Nullable<Bool>,
        name -> Nullable<Varchar>,
        entry -> Nullable<Varchar>,
        created_at -> Nullable<Int8>,
        created_by -> Nullable<Varchar>,
        updated_at -> Nullable<Int8>,
        updated_by -> Nullable<Varchar>,
        scheduled_at -> Nullable<Int8>,
        branch -> Nullable<Varchar>,
        error -> Nullable<Varchar>,
    }
}

diesel::table! {
    secrets (id) {
        id -> Int8,
        org -> Nullable<Varchar>,
        repo -> Nullable<Varchar>,
        team -> Nullable<Varchar>,
        name -> Nullable<Varchar>,
        value -> Nullable<Text>,
        #[sql_name = "type"]
        kind -> Nullable<Varchar>,
        images -> Array<Text>,
        events -> Array<Text>,
        allow_command -> Nullable<Bool>,
        allow_substitution -> Nullable<Bool>,
        created_at -> Nullable<Int8>,
        created_by -> Nullable<Varchar>,
        updated_at -> Nullable<Int8>,
        updated_by -> Nullable<Varchar>,
    }
}

diesel::table! {
    services (id) {
        id -> Int8,
        build_id -> Nullable<Int8>,
        repo_id -> Nullable<Int8>,
        number -> Nullable<Int4>,
        name -> Nullable<Varchar>,
        image -> Nullable<Varchar>,
        status -> Nullable<Varchar>,
        error -> Nullable<Varchar>,
        exit_code -> Nullable<Int4>,
        created -> Nullable<Int8>,
        started -> Nullable<Int8>,
        finished -> Nullable<Int8>,
        host -> Nullable<Varchar>,
        runtime -> Nullable<Varchar>,
        distribution -> Nullable<Varchar>,
    }
}

diesel::table! {
    steps (id) {
        id -> Int8,
        build_id -> Nullable<Int8>,
        repo_id -> Nullable<Int8>,
        number -> Nullable<Int4>,
        name -> Nullable<Varchar>,
        image -> Nullable<Varchar>,
        stage -> Nullable<Varchar>,
        status -> Nullable<Varchar>,
        error -> Nullable<Varchar>,
        exit_code -> Nullable<Int4>,
        created -> Nullable<Int8>,
        started -> Nullable<Int8>,
        finished -> Nullable<Int8>,
        host -> Nullable<Varchar>,
        runtime -> Nullable<Varchar>,
        distribution -> Nullable<Varchar>,
        report_as -> Nullable<Varchar>,
    }
}

diesel::table! {
    users (id) {
        id -> Int8,
        name -> Nullable<Varchar>,
        refresh_token -> Nullable<Varchar>,
        token -> Nullable<Varchar>,
        hash -> Nullable<Varchar>,
        favorites -> Array<Text>,
        active -> Nullable<Bool>,
        admin -> Nullable<Bool>,
        dashboards -> Array<Text>,
    }
}

diesel::table! {
    workers (id) {
        id -> Int8,
        hostname -> Nullable<Varchar>,
        address -> Nullable<Varchar>,
        routes -> Array<Text>,
        active -> Nullable<Bool>,
        status -> Nullable<Varchar>,
        last_status_update_at -> Nullable<Int8>,
        running_build_ids -> Array<Text>,
        last_build_started_at -> Nullable<Int8>,
        last_build_finished_at -> Nullable<Int8>,
        last_checked_in -> Nullable<Int8>,
        build_limit -> Nullable<Int8>,
    }
}

// Foreign key relationships
diesel::joinable!(builds -> repos (repo_id));
diesel::joinable!(build_executables -> builds (build_id));
diesel::joinable!(build_itineraries -> builds (build_id));
diesel::joinable!(compiled -> builds (build_id));
diesel::joinable!(deployments -> repos (repo_id));
diesel::joinable!(hooks -> repos (repo_id));
diesel::joinable!(inits -> builds (build_id));
diesel::joinable!(init_steps -> builds (build_id));
diesel::joinable!(logs -> builds (build_id));
diesel::joinable!(pipelines -> repos (repo_id));
diesel::joinable!(schedules -> repos (repo_id));
diesel::joinable!(services -> builds (build_id));
diesel::joinable!(steps -> builds (build_id));

diesel::allow_tables_to_appear_in_same_query!(
    builds,
    build_executables,
    build_itineraries,
    compiled,
    dashboards,
    deployments,
    hooks,
    inits,
    init_steps,
    logs,
    pipelines,
    repos,
    schedules,
    secrets,
    services,
    steps,
    users,
    workers,
);
