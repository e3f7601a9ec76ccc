//! Shared CSV templates for unit tests.

/// A CSV template shaped like the operator's real one, with placeholders
/// in every field the generator overwrites.
pub const TEMPLATE: &str = r#"apiVersion: operators.coreos.com/v1alpha1
kind: ClusterServiceVersion
metadata:
  annotations:
    alm-examples: '[]'
    capabilities: Basic Install
    containerImage: REPLACE_IMAGE
    repository: https://github.com/openshift-kni/performance-addon-operators
  creationTimestamp: null
  name: performance-addon-operator.v0.0.0
  namespace: openshift-performance-addon
spec:
  apiservicedefinitions: {}
  customresourcedefinitions:
    owned:
    - description: PerformanceProfile is the Schema for the performanceprofiles API
      kind: PerformanceProfile
      name: performanceprofiles.performance.openshift.io
      version: v1
    - description: A resource the generator does not know about
      displayName: Other Thing
      kind: OtherThing
      name: otherthings.example.com
      version: v1alpha1
  description: placeholder
  displayName: placeholder
  install:
    spec:
      clusterPermissions:
      - rules:
        - apiGroups:
          - ""
          resources:
          - nodes
          verbs:
          - get
          - list
        serviceAccountName: performance-operator
      deployments:
      - name: performance-operator
        spec:
          replicas: 1
          selector:
            matchLabels:
              name: performance-operator
          strategy: {}
          template:
            metadata:
              creationTimestamp: null
              labels:
                name: performance-operator
            spec:
              containers:
              - command:
                - performance-operator
                env:
                - name: WATCH_NAMESPACE
                  value: ""
                image: REPLACE_IMAGE
                name: performance-operator
                resources: {}
              - image: registry.example.com/sidecar:1.0
                name: sidecar
                resources: {}
              serviceAccountName: performance-operator
      permissions:
      - rules:
        - apiGroups:
          - ""
          resources:
          - configmaps
          verbs:
          - '*'
        serviceAccountName: performance-operator
    strategy: deployment
  installModes:
  - supported: true
    type: OwnNamespace
  - supported: false
    type: AllNamespaces
  keywords:
  - placeholder
  links:
  - name: Placeholder
    url: https://example.com
  maintainers:
  - email: existing@example.com
    name: Existing Maintainer
  maturity: placeholder
  provider:
    name: placeholder
  replaces: performance-addon-operator.v0.0.0-old
  version: 0.0.0
status:
  certsLastUpdated: null
  certsRotateAt: null
"#;
